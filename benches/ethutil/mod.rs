pub mod storage;
pub mod uint256;
