mod derivation;
mod middle_square;
