/// Logging port. Business code never talks to a logging backend directly.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
