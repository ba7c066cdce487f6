pub mod preguntar;
