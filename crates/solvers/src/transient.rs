pub mod implicit;
