pub mod admin_list;
