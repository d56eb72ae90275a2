use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::instance_storage_accessors;
use utils::storage_errors::StorageError;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TokenA,
    TokenB,
    ReserveA,
    ReserveB,
}

instance_storage_accessors!(token_a, DataKey::TokenA, Address);
instance_storage_accessors!(token_b, DataKey::TokenB, Address);
instance_storage_accessors!(reserve_a, DataKey::ReserveA, u128, 0);
instance_storage_accessors!(reserve_b, DataKey::ReserveB, u128, 0);
