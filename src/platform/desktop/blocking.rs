/// Runs work on the UI thread. File dialogs and imports are short enough
/// that the desktop build does them inline.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
