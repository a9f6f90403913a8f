/// The front end never aborts on bad input: diagnostics are accumulated as
/// data and failure is signalled by `Err(())` once they have been reported.
pub type Result<T> = std::result::Result<T, ()>;
