mod controls;
mod list;
mod panels;
mod popup;
