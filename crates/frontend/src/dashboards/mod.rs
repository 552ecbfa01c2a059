pub mod d100_operations;
