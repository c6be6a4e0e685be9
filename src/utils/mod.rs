pub mod leptos_owner;
