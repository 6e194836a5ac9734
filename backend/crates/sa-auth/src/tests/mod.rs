
pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const WRONG_SECRET: &[u8] = b"wrong-secret-key-at-least-32-by";
