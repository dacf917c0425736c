use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum OracleEvent {
    Initialized(Address, Address),
    OracleUpdate(Address, bool, u64),
    UpdaterAddressChange(Address),
}

impl OracleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OracleEvent::Initialized(..) => stringify!(Initialized),
            OracleEvent::OracleUpdate(..) => stringify!(OracleUpdate),
            OracleEvent::UpdaterAddressChange(..) => stringify!(UpdaterAddressChange),
        }
    }

    pub fn data(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            OracleEvent::Initialized(owner, updater) => {
                v.push_back(owner.into_val(env));
                v.push_back(updater.into_val(env));
            }
            OracleEvent::OracleUpdate(subject, validity, timestamp) => {
                v.push_back(subject.into_val(env));
                v.push_back(validity.into_val(env));
                v.push_back(timestamp.into_val(env));
            }
            OracleEvent::UpdaterAddressChange(new_updater) => {
                v.push_back(new_updater.into_val(env));
            }
        }
        v
    }

    /// Fire-and-forget: the host commits the event together with the call.
    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.data(env))
    }
}
