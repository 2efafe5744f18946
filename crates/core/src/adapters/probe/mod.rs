pub mod reqwest_probe;
