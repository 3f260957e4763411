pub mod advice;
pub mod form;
pub mod header;
pub mod line_chart;
pub mod pie_chart;
