use std::collections::BTreeMap;

use super::error::ScoringError;
use super::policy::{PolicyId, PolicyRecord, ScoringPolicy};

/// In-memory catalog of scoring policies that keeps a single default.
///
/// The persistence layer hydrates this from its policy table; the engine itself
/// only ever receives the resolved [`ScoringPolicy`].
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    policies: BTreeMap<PolicyId, ScoringPolicy>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a full policy catalog. At most one record may claim the
    /// default; a second claimant fails the whole load.
    pub fn from_records<I>(records: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = PolicyRecord>,
    {
        let mut registry = Self::new();
        let mut loaded_default: Option<PolicyId> = None;

        for record in records {
            let policy = ScoringPolicy::try_from(record)?;
            let claims_default = policy.is_default && policy.is_active;
            if let Some(previous) = loaded_default.as_ref().filter(|_| claims_default) {
                return Err(ScoringError::Configuration(format!(
                    "policies {previous} and {} are both marked default",
                    policy.id
                )));
            }
            let id = policy.id.clone();
            registry.insert(policy)?;
            if claims_default {
                loaded_default = Some(id);
            }
        }

        Ok(registry)
    }

    pub fn insert_record(&mut self, record: PolicyRecord) -> Result<(), ScoringError> {
        let policy = ScoringPolicy::try_from(record)?;
        self.insert(policy)?;
        Ok(())
    }

    /// Store a policy, replacing any previous version with the same id. A new
    /// default displaces the old one; an inactive default is refused before
    /// anything changes.
    pub fn insert(
        &mut self,
        policy: ScoringPolicy,
    ) -> Result<Option<ScoringPolicy>, ScoringError> {
        if policy.is_default {
            if !policy.is_active {
                return Err(ScoringError::Configuration(format!(
                    "policy {} is inactive and cannot become the default",
                    policy.id
                )));
            }
            self.clear_default();
        }
        Ok(self.policies.insert(policy.id.clone(), policy))
    }

    /// Move the default flag to `id`, clearing it everywhere else.
    pub fn set_default(&mut self, id: &PolicyId) -> Result<(), ScoringError> {
        match self.policies.get(id) {
            None => {
                return Err(ScoringError::Configuration(format!(
                    "policy {id} does not exist"
                )))
            }
            Some(policy) if !policy.is_active => {
                return Err(ScoringError::Configuration(format!(
                    "policy {id} is inactive and cannot become the default"
                )))
            }
            Some(_) => {}
        }

        self.clear_default();
        if let Some(policy) = self.policies.get_mut(id) {
            policy.is_default = true;
        }
        Ok(())
    }

    pub fn get(&self, id: &PolicyId) -> Option<&ScoringPolicy> {
        self.policies.get(id)
    }

    pub fn default_policy(&self) -> Option<&ScoringPolicy> {
        self.policies
            .values()
            .find(|policy| policy.is_default && policy.is_active)
    }

    /// Pick the session's explicit policy, or fall back to the active default.
    pub fn resolve(&self, explicit: Option<&PolicyId>) -> Result<&ScoringPolicy, ScoringError> {
        match explicit {
            Some(id) => {
                let policy = self.policies.get(id).ok_or_else(|| {
                    ScoringError::Configuration(format!("policy {id} does not exist"))
                })?;
                if !policy.is_active {
                    return Err(ScoringError::Configuration(format!(
                        "policy {id} is inactive"
                    )));
                }
                Ok(policy)
            }
            None => self.default_policy().ok_or_else(|| {
                ScoringError::Configuration(
                    "no policy assigned and no active default policy exists".to_string(),
                )
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoringPolicy> {
        self.policies.values()
    }

    fn clear_default(&mut self) {
        for policy in self.policies.values_mut() {
            policy.is_default = false;
        }
    }
}
