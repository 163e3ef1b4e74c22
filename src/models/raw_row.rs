use serde::Deserialize;

/// One line of the export exactly as read, keyed by the export's column headers.
///
/// Every column is optional: empty cells and columns missing from the header
/// both come through as `None`. Columns not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Arriving by date")]
    pub arriving_by: Option<String>,
    #[serde(rename = "Type")]
    pub transaction_type: Option<String>,
    #[serde(rename = "Confirmation code")]
    pub confirmation_code: Option<String>,
    #[serde(rename = "Booking date")]
    pub booking_date: Option<String>,
    #[serde(rename = "Start date")]
    pub start_date: Option<String>,
    #[serde(rename = "End date")]
    pub end_date: Option<String>,
    #[serde(rename = "Nights")]
    pub nights: Option<String>,
    #[serde(rename = "Guest")]
    pub guest: Option<String>,
    #[serde(rename = "Listing")]
    pub listing: Option<String>,
    #[serde(rename = "Details")]
    pub details: Option<String>,
    #[serde(rename = "Reference code")]
    pub reference_code: Option<String>,
    #[serde(rename = "Currency")]
    pub currency: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<String>,
    #[serde(rename = "Paid out")]
    pub paid_out: Option<String>,
    #[serde(rename = "Service fee")]
    pub service_fee: Option<String>,
    #[serde(rename = "Fast pay fee")]
    pub fast_pay_fee: Option<String>,
    #[serde(rename = "Cleaning fee")]
    pub cleaning_fee: Option<String>,
    #[serde(rename = "Pet fee")]
    pub pet_fee: Option<String>,
    #[serde(rename = "Gross earnings")]
    pub gross_earnings: Option<String>,
    #[serde(rename = "Occupancy taxes")]
    pub occupancy_taxes: Option<String>,
    #[serde(rename = "Earnings year")]
    pub earnings_year: Option<String>
}
