pub mod tet;
