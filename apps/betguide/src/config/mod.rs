pub mod db;
pub mod site;
