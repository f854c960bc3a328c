
/// Mock DUTs.
pub mod mocks;
