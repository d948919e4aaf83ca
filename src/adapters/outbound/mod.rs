pub mod codec;
pub mod storage;
