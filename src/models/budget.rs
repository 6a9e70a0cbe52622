use serde::{ Serialize, Deserialize };

/// Fields are optional so a missing one becomes a 400 rather than a body rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub city: Option<String>,
    pub country: Option<String>,
    pub profile: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub local_currency: String,
    pub currency_symbol: String,
    pub exchange_rate: f64,
    pub categories: Vec<BudgetCategory>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: String,
    pub sub_elements: Vec<BudgetItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BudgetItem {
    pub name: String,
    #[serde(rename = "amountUSD")]
    pub amount_usd: f64,
    #[serde(rename = "amountLocal")]
    pub amount_local: f64,
}
