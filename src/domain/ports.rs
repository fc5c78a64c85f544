use crate::utils::error::Result;

/// 列印輸出的目的地。寫入後不回傳任何狀態給呼叫者。
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
