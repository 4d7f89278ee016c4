use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotAuthorized = 1,
    SelfRemovalForbidden = 2,
    DuplicateServer = 3,
    ServerNotFound = 4,
    AlreadyRegistered = 5,
    EmptySource = 6,
    NotRegistered = 7,
    AlreadyDisabled = 8,
    NoEffectiveChange = 9,
    AlreadyInitialized = 10,
    NotInitialized = 11,
    ServerIndexOutOfRange = 12,
}
