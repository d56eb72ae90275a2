// Instance storage accessors.
//
// The calling module must have `paste::paste`, `soroban_sdk::{panic_with_error, Env}`,
// `utils::bump::bump_instance` and `utils::storage_errors::StorageError` in scope.
//
// `(name, key, type)` generates `get_name` (panics with `ValueNotInitialized` when unset),
// `set_name` and `has_name`.
// `(name, key, type, default)` generates `get_name` falling back to `default` and `set_name`.
#[macro_export]
macro_rules! instance_storage_accessors {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                match e.storage().instance().get(&$key) {
                    Some(value) => value,
                    None => panic_with_error!(e, StorageError::ValueNotInitialized),
                }
            }

            pub fn [<has_ $attr_name>](e: &Env) -> bool {
                e.storage().instance().has(&$key)
            }
        }
        $crate::instance_storage_setter!($attr_name, $key, $data_type);
    };
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
        $crate::instance_storage_setter!($attr_name, $key, $data_type);
    };
}

#[macro_export]
macro_rules! instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage().instance().set(&$key, $attr_name)
            }
        }
    };
}
