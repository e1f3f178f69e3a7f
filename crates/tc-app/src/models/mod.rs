mod conversion_report;

pub use conversion_report::ConversionReport;
