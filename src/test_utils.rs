use crate::CalendarDate;

pub fn date(day: u8, month: u8, year: u16) -> CalendarDate {
    CalendarDate::new(day, month, year)
}

pub fn text(day: u32, month: u32, year: i32) -> String {
    format!("{day:02}-{month:02}-{year:04}")
}
