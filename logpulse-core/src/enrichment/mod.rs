pub mod pv_filter;
