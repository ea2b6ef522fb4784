//! CSV export of the history.

use csv::Writer;

use crate::{BudgetEntry, EngineError, ResultEngine};

/// File name of the export left in the storage directory.
pub const EXPORT_FILE: &str = "budgets_export.csv";

/// Render every entry as CSV: a header row, then one row per entry with its
/// raw and derived fields.
pub fn export_csv(entries: &[BudgetEntry]) -> ResultEngine<Vec<u8>> {
    if entries.is_empty() {
        return Err(EngineError::NoData);
    }

    let mut writer = Writer::from_writer(vec![]);
    for entry in entries {
        writer.serialize(entry)?;
    }

    writer
        .into_inner()
        .map_err(|err| EngineError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::BudgetInput;

    #[test]
    fn empty_history_is_no_data() {
        assert_eq!(export_csv(&[]), Err(EngineError::NoData));
    }

    #[test]
    fn header_and_rows_follow_field_order() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_micro_opt(8, 15, 0, 250_000))
            .unwrap();
        let entry = BudgetEntry::new(timestamp, BudgetInput {
            income: 1000.0,
            rent: 300.0,
            dining: 50.5,
            goal_price: 20.0,
            ..BudgetInput::default()
        });

        let csv = String::from_utf8(export_csv(&[entry.clone(), entry]).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(
                "timestamp,income,rent,utilities,groceries,recharge,transport,dining,ott,\
                 shopping,goal_price,needs_total,wants_total,total_expenses,savings,savings_rate"
            )
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2024-02-01T08:15:00.250,1000.0,300.0,"));
        assert!(row.ends_with(",300.0,50.5,350.5,649.5,64.95"));
        assert_eq!(lines.count(), 1);
    }
}
