pub mod a1_notation;
pub mod cell_text;
pub mod record;
pub mod row;
