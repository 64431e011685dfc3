//! Integration tests for loading and merging provider exports

use approx::assert_relative_eq;
use chrono::NaiveDate;
use hobart_data::{
    CombinedTable, DataError, LoaderConfig, StatementTable, TableLoader, TableMerger,
};
use rstest::rstest;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fiscal_year(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 3, 1).unwrap()
}

fn balance_sheet() -> StatementTable {
    TableLoader::balance_sheet()
        .load_path(format!("{FIXTURES}/balance_sheet.csv"))
        .unwrap()
}

fn profit_loss() -> StatementTable {
    TableLoader::profit_and_loss()
        .load_path(format!("{FIXTURES}/profit_loss.csv"))
        .unwrap()
}

#[test]
fn test_balance_sheet_shape() {
    let table = balance_sheet();

    // 6 header cells minus the metric column; 10 data rows minus one spacer row
    assert_eq!(table.height(), 5);
    assert_eq!(table.metric_names().len(), 9);
    assert_eq!(table.dates().unwrap().first(), Some(&fiscal_year(2013)));
    assert_eq!(
        table.values("Reserves").unwrap()[0],
        Some(176_766.0)
    );
}

#[test]
fn test_profit_loss_percent_columns() {
    let table = profit_loss();

    assert_eq!(table.height(), 5);
    assert_eq!(table.metric_names().len(), 12);

    let opm = table.values("OPM").unwrap();
    assert_relative_eq!(opm[0].unwrap(), 0.09);
    assert_relative_eq!(opm[2].unwrap(), 0.18);

    let payout = table.values("Dividend Payout").unwrap();
    assert_relative_eq!(payout[4].unwrap(), 0.10);

    // Plain decimals are untouched
    let eps = table.values("EPS").unwrap();
    assert_relative_eq!(eps[0].unwrap(), 68.02);
}

#[test]
fn test_merge_fixture_statements() {
    let combined = TableMerger::new()
        .merge(&balance_sheet(), &profit_loss())
        .unwrap();

    assert_eq!(
        combined.dates().unwrap(),
        (2014..=2017).map(fiscal_year).collect::<Vec<_>>()
    );
    assert_eq!(combined.column_names().len(), 9 + 12);
    assert_eq!(combined.values("Inventory").unwrap()[0], Some(43_177.0));
    assert_eq!(combined.values("Sales").unwrap()[0], Some(390_117.0));
}

#[test]
fn test_self_merge_is_identity() {
    let table = balance_sheet();
    let combined = TableMerger::new().merge(&table, &table).unwrap();

    assert_eq!(combined.height(), table.height());
    assert_eq!(combined.column_names(), table.metric_names());
    for metric in table.metric_names() {
        assert_eq!(combined.values(&metric).unwrap(), table.values(&metric).unwrap());
    }
}

#[rstest]
#[case("Report Date,13-03,14-03\nSales,1,2\n", 2, 1)]
#[case("Narration,13-03\nSales,1\nDebtors,2\nInventory,3\n", 1, 3)]
#[case("x,10-03,11-03,12-03,13-03\nA,1,2,3,4\nB,5,6,7,8\n", 4, 2)]
fn test_shape_matches_transpose(
    #[case] csv: &str,
    #[case] rows: usize,
    #[case] columns: usize,
) {
    let table = TableLoader::balance_sheet()
        .load_reader(csv.as_bytes())
        .unwrap();
    assert_eq!(table.height(), rows);
    assert_eq!(table.metric_names().len(), columns);
}

#[test]
fn test_custom_percent_column() {
    let csv = "Report Date,13-03\nPromoter Holding,50.5%\n";
    let loader = TableLoader::new(LoaderConfig::balance_sheet().with_percent_column("Promoter Holding"));
    let table = loader.load_reader(csv.as_bytes()).unwrap();
    assert_relative_eq!(table.values("Promoter Holding").unwrap()[0].unwrap(), 0.505);
}

#[test]
fn test_footnote_cell_aborts_load() {
    let csv = "Report Date,13-03,14-03\nSales,\"1,000\",see note 4\n";
    let err = TableLoader::profit_and_loss()
        .load_reader(csv.as_bytes())
        .unwrap_err();
    assert!(matches!(
        err,
        DataError::Parse { ref metric, ref year, .. } if metric == "Sales" && year == "14-03"
    ));
}

#[test]
fn test_missing_file() {
    let err = TableLoader::balance_sheet()
        .load_path(format!("{FIXTURES}/does_not_exist.csv"))
        .unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn test_descending_export_is_ascending_when_combined() {
    let csv = "Report Date,16-03,15-03,14-03\nSales,3,2,1\nOPM,30%,20%,10%\n";
    let profit_loss = TableLoader::profit_and_loss()
        .load_reader(csv.as_bytes())
        .unwrap();
    let combined = CombinedTable::from(profit_loss);

    assert_eq!(
        combined.dates().unwrap(),
        (2014..=2016).map(fiscal_year).collect::<Vec<_>>()
    );
    assert_eq!(
        combined.values("Sales").unwrap(),
        vec![Some(1.0), Some(2.0), Some(3.0)]
    );
    assert_relative_eq!(combined.values("OPM").unwrap()[0].unwrap(), 0.1);
}
