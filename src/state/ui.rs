//! UI state for the borrower home page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the borrower home page. Only Borrow has content; the other
/// two show a coming-soon placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    Borrow,
    Transact,
    Deposit,
}

impl HomeTab {
    pub const ALL: [HomeTab; 3] = [HomeTab::Borrow, HomeTab::Transact, HomeTab::Deposit];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            HomeTab::Borrow => "Borrow Cash",
            HomeTab::Transact => "Transact Cash",
            HomeTab::Deposit => "Deposit Cash",
        }
    }
}
