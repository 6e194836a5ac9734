mod new_user;
mod user_id;
