use chrono::{Datelike, Local, NaiveDate};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// 以巴西葡萄牙語長格式輸出日期，例如 `7 de março de 2025`
pub fn format_pt_br(date: NaiveDate) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
