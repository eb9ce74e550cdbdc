#![allow(dead_code, unused_macros)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds an appointment workbook shaped like the published form export:
/// a mis-decoded header, a blank header over a filled column, date and time
/// cells, and a fully blank row between the two appointments.
pub fn citas_workbook() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm:ss");

    let headers = ["Nombre", "TelÃ©fono", "Fecha", "Hora", "", "Confirmada", "Â¿Primera vez?"];
    for (col, header) in headers.iter().enumerate() {
        if !header.is_empty() {
            sheet.write_string(0, col as u16, *header)?;
        }
    }

    sheet.write_string(1, 0, "Ana")?;
    sheet.write_number(1, 1, 5551234)?;
    sheet.write_datetime_with_format(1, 2, &ExcelDateTime::from_ymd(2024, 1, 1)?, &date_format)?;
    sheet.write_datetime_with_format(1, 3, &ExcelDateTime::from_hms(10, 30, 0)?, &time_format)?;
    sheet.write_string(1, 4, "nota")?;
    sheet.write_boolean(1, 5, true)?;
    sheet.write_string(1, 6, "Sí")?;

    sheet.write_string(3, 0, "Luis")?;
    sheet.write_number(3, 1, 2.5)?;
    sheet.write_datetime_with_format(3, 2, &ExcelDateTime::from_ymd(2024, 2, 29)?, &date_format)?;
    sheet.write_boolean(3, 5, false)?;

    workbook.save_to_buffer()
}

/// Workbook with a header row and `rows` numbered appointments.
pub fn numbered_workbook(rows: u32) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Nombre")?;
    sheet.write_string(0, 1, "Turno")?;
    for row in 1..=rows {
        sheet.write_string(row, 0, format!("Paciente {row}"))?;
        sheet.write_number(row, 1, row)?;
    }

    workbook.save_to_buffer()
}

/// Service under test, reading its sheet from `$url`.
macro_rules! citas_app {
    ($url:expr) => {{
        let config = api_citas_excel::config::AppConfig::with_source($url);
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_cors::Cors::permissive())
                .app_data(actix_web::web::Data::new(
                    api_citas_excel::excel::SheetSource::new(&config.source),
                ))
                .configure(api_citas_excel::routes::init),
        )
        .await
    }};
}
