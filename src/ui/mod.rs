/// Presentation layer: page panels and the status charts. Business rules
/// stay in `data`; these modules only map results to widgets.
pub mod chart;
pub mod panels;
