/// the account balance shown in the page header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalanceDisplay {
    balance: Option<f64>,
}

impl BalanceDisplay {
    pub fn new(balance: Option<f64>) -> BalanceDisplay {
        BalanceDisplay { balance }
    }

    pub fn set(&mut self, balance: f64) {
        self.balance = Some(balance);
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn text(&self) -> String {
        match self.balance {
            Some(b) => format!("${b:.2}"),
            None => String::from("$--"),
        }
    }
}
