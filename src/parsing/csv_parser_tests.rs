use chrono::NaiveDate;

use super::csv_parser::*;

#[test]
fn parses_passenger_flights_with_lenient_values() {
    let csv = "\
record_locator,pnr_creation_date,flight_number,scheduled_departure_date_local,total_pax
ABC123,2024-04-20,1234,2024-05-01,2
DEF456,not-a-date,1234,2024-05-01,3.0
GHI789,2024-04-22,5678,,
";

    let records = parse_passenger_flights(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].record_locator, "ABC123");
    assert_eq!(
        records[0].pnr_creation_date,
        NaiveDate::from_ymd_opt(2024, 4, 20)
    );
    assert_eq!(records[0].total_pax, 2);

    // Unparsable date coerces to missing, row survives.
    assert_eq!(records[1].pnr_creation_date, None);
    assert_eq!(records[1].total_pax, 3);

    // Empty departure date and pax count.
    assert_eq!(records[2].scheduled_departure_date, None);
    assert_eq!(records[2].total_pax, 0);
}

#[test]
fn missing_required_column_is_an_error() {
    // No flight_number column at all.
    let csv = "\
record_locator,pnr_creation_date,total_pax
ABC123,2024-04-20,2
";

    assert!(parse_passenger_flights(csv.as_bytes()).is_err());
}

#[test]
fn parses_remarks_with_empty_markers() {
    let csv = "\
record_locator,pnr_creation_date,flight_number,special_service_request
ABC123,2024-04-20,1234,WCHR
DEF456,2024-04-21,1234,
";

    let records = parse_remarks(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].special_service_request.as_deref(),
        Some("WCHR")
    );
    assert_eq!(records[1].special_service_request, None);
}

#[test]
fn parses_flights_and_derives_departure_date() {
    let csv = "\
company_id,flight_number,scheduled_departure_datetime_local,actual_departure_datetime_local,total_seats,scheduled_ground_time_minutes,minimum_turn_minutes
UA,1234,2024-05-01 09:30:00,2024-05-01 09:45:00,179,65,45
UA,5678,bad-timestamp,2024-05-02 11:00:00,,50.5,40
";

    let records = parse_flights(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(
        records[0].scheduled_departure_date,
        NaiveDate::from_ymd_opt(2024, 5, 1)
    );
    assert_eq!(records[0].total_seats, Some(179));
    assert_eq!(records[0].scheduled_ground_time_minutes, Some(65.0));

    // Unparsable scheduled timestamp: no timestamp, no derived date.
    assert_eq!(records[1].scheduled_departure, None);
    assert_eq!(records[1].scheduled_departure_date, None);
    assert_eq!(records[1].total_seats, None);
    assert_eq!(records[1].scheduled_ground_time_minutes, Some(50.5));
}

#[test]
fn seat_counts_parse_through_float_formatting() {
    let csv = "\
company_id,flight_number,scheduled_departure_datetime_local,actual_departure_datetime_local,total_seats,scheduled_ground_time_minutes,minimum_turn_minutes
UA,1234,2024-05-01 09:30:00,2024-05-01 09:45:00,179.0,65,45
";

    let records = parse_flights(csv.as_bytes()).unwrap();
    assert_eq!(records[0].total_seats, Some(179));
}

#[test]
fn parses_bags_keeping_raw_type_labels() {
    let csv = "\
company_id,flight_number,bag_type
UA,1234,Origin
UA,1234, Hot Transfer
OO,9999,transfer
";

    let records = parse_bags(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].bag_type, "Origin");
    use crate::core::domain::BagType;
    assert_eq!(records[1].category(), BagType::HotTransfer);
    assert_eq!(records[2].company_id, "OO");
}
