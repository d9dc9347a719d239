//! Reward catalog - the roles a winner can be awarded

use rand::Rng;

use crate::error::DomainError;

/// Roles handed out when no catalog is configured
pub const DEFAULT_ROLES: &[&str] = &[
    "Alya", "Amanda", "Anindya", "Aralie", "Cathy", "Chelsea", "Christy", "Cynthia", "Daisy",
    "Danella", "Delynn", "Eli", "Elin", "Ella", "Erine", "Feni", "Fiony", "Freya", "Fritzy",
    "Gendis", "Gita", "Gracia", "Gracie", "Greesel", "Indah", "Indira", "Jessi", "Kathrina",
    "Kimmy", "Lana", "Levi", "Lia", "Lily", "Lulu", "Lyn", "Marsha", "Michie", "Moreen", "Muthe",
    "Nachia", "Nala", "Nayla", "Oline", "Olla", "Oniel", "Raisha", "Regie", "Ribka", "Trisha",
];

/// Non-empty list of reward roles
///
/// Every draw is uniform over the whole list: no weighting, and roles that
/// were already awarded stay eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCatalog {
    roles: Vec<String>,
}

impl RewardCatalog {
    /// Build a catalog, dropping blank entries
    pub fn new<I, S>(roles: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles
            .into_iter()
            .map(Into::into)
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .collect();

        if roles.is_empty() {
            return Err(DomainError::EmptyRewardCatalog);
        }

        Ok(Self { roles })
    }

    /// Number of roles in the catalog
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Never true for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Draw one role using the thread-local RNG
    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Draw one role using the given RNG
    pub fn pick_with<R: Rng>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.roles.len());
        &self.roles[index]
    }
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}
