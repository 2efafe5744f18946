pub mod system_opener;
