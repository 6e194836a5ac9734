pub mod new_user;
pub mod user_id;
pub mod user_record;
