use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format a float as a euro amount with French separators: 1 234,56 €
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_spaces = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_spaces.push(' ');
        }
        with_spaces.push(c);
    }
    let with_spaces: String = with_spaces.chars().rev().collect();

    if negative {
        format!("-{with_spaces},{dec_part} €")
    } else {
        format!("{with_spaces},{dec_part} €")
    }
}

/// Short date used in the bills list: 4 Avr. 04
pub fn short_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {}. {:02}", date.day(), month, date.year().rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "1 234,56 €");
        assert_eq!(money(-500.00), "-500,00 €");
        assert_eq!(money(0.0), "0,00 €");
        assert_eq!(money(1000000.99), "1 000 000,99 €");
        assert_eq!(money(400.0), "400,00 €");
    }

    #[test]
    fn test_short_date() {
        let d = NaiveDate::from_ymd_opt(2004, 4, 4).unwrap();
        assert_eq!(short_date(d), "4 Avr. 04");
        let d = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(short_date(d), "1 Jan. 01");
    }
}
