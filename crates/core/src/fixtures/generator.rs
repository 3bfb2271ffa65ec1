//! Seeded synthetic CRM record generation.
//!
//! [`FixtureGenerator`] is pure computation: it owns a [`StdRng`] and the
//! "today" date the batch is generated against, and produces in-memory
//! candidates. Resolving candidates against the store is the seeder's job.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::TimeDelta;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::crm::{Activity, DealStage, InteractionKind, ProspectStatus};
use crate::error::CoreError;
use crate::fixtures::catalog;
use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Generation constants
// ---------------------------------------------------------------------------

/// Candidates generated per run when not configured otherwise.
pub const DEFAULT_PROSPECT_COUNT: usize = 100;

/// `last_contact` is sampled from `[today - 60d, today]`.
pub const LAST_CONTACT_WINDOW_DAYS: i64 = 60;

/// Days ahead of today a deal is expected to close.
pub const CLOSE_DATE_DAYS: RangeInclusive<i64> = 10..=90;

/// Days ahead of today a follow-up task is due.
pub const DUE_DATE_DAYS: RangeInclusive<i64> = 1..=30;

pub const MIN_DEAL_AMOUNT: f64 = 500.0;
pub const MAX_DEAL_AMOUNT: f64 = 5000.0;

/// Upper bound on interaction content length, in characters.
pub const MAX_NOTE_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Candidate records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProspectCandidate {
    pub name: String,
    pub email: String,
    pub last_contact: Date,
    pub status: ProspectStatus,
    pub last_activity: Activity,
}

/// A company fact. Generated alongside a prospect but never linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyCandidate {
    pub name: String,
    pub industry: String,
    pub address: String,
    pub website: String,
}

/// An interaction keyed by the name of the prospect it was generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionDraft {
    pub prospect_name: String,
    pub kind: InteractionKind,
    pub content: String,
    pub date: Date,
}

/// A deal before a prospect has been assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DealDraft {
    pub title: String,
    pub amount: f64,
    pub stage: DealStage,
    pub close_date: Date,
}

/// A follow-up task before a prospect has been assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: Date,
    pub completed: bool,
}

/// One generation pass. All vectors have the same length and the same
/// index refers to the same loop iteration.
#[derive(Debug, Clone, Default)]
pub struct FixtureBatch {
    pub prospects: Vec<ProspectCandidate>,
    pub companies: Vec<CompanyCandidate>,
    pub interactions: Vec<InteractionDraft>,
    pub deals: Vec<DealDraft>,
    pub tasks: Vec<TaskDraft>,
}

impl FixtureBatch {
    /// Number of loop iterations that produced this batch.
    pub fn len(&self) -> usize {
        self.prospects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prospects.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

pub struct FixtureGenerator {
    rng: StdRng,
    today: Date,
}

impl FixtureGenerator {
    /// Deterministic generator: the same seed and date always yield the
    /// same batch and the same prospect picks.
    pub fn seeded(seed: u64, today: Date) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
        }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy(today: Date) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            today,
        }
    }

    /// Seeded when `seed` is set, entropy-backed otherwise.
    pub fn new(seed: Option<u64>, today: Date) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, today),
            None => Self::from_entropy(today),
        }
    }

    /// The date all relative dates in a batch are computed from.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Generate `count` candidates of every record kind.
    ///
    /// Names are drawn independently per candidate, so a batch may contain
    /// the same prospect or company name more than once. Collisions are
    /// left in place for the caller to resolve.
    pub fn generate(&mut self, count: usize) -> Result<FixtureBatch, CoreError> {
        if count == 0 {
            return Err(CoreError::Validation(
                "candidate count must be at least 1".to_string(),
            ));
        }

        let mut batch = FixtureBatch {
            prospects: Vec::with_capacity(count),
            companies: Vec::with_capacity(count),
            interactions: Vec::with_capacity(count),
            deals: Vec::with_capacity(count),
            tasks: Vec::with_capacity(count),
        };

        for _ in 0..count {
            let prospect = self.prospect();
            let company = self.company();

            batch.interactions.push(InteractionDraft {
                prospect_name: prospect.name.clone(),
                kind: InteractionKind::Call,
                content: self.note(),
                date: prospect.last_contact,
            });

            batch.deals.push(DealDraft {
                title: format!("Offer for {}", company.name),
                amount: round_cents(self.rng.random_range(MIN_DEAL_AMOUNT..=MAX_DEAL_AMOUNT)),
                stage: DealStage::ProposalSent,
                close_date: self.days_ahead(CLOSE_DATE_DAYS),
            });

            batch.tasks.push(TaskDraft {
                title: format!("Follow up {}", prospect.name),
                due_date: self.days_ahead(DUE_DATE_DAYS),
                completed: self.rng.random_bool(0.5),
            });

            batch.prospects.push(prospect);
            batch.companies.push(company);
        }

        Ok(batch)
    }

    /// Pick a prospect id uniformly at random. `None` when `ids` is empty.
    pub fn pick_prospect(&mut self, ids: &[DbId]) -> Option<DbId> {
        ids.choose(&mut self.rng).copied()
    }

    fn prospect(&mut self) -> ProspectCandidate {
        let first = self.pick(catalog::FIRST_NAMES);
        let initial = char::from(self.rng.random_range(b'A'..=b'Z'));
        let last = self.pick(catalog::LAST_NAMES);
        let back = self.rng.random_range(0..=LAST_CONTACT_WINDOW_DAYS);

        ProspectCandidate {
            name: format!("{first} {initial}. {last}"),
            email: self.email(first, last),
            last_contact: self.today - TimeDelta::days(back),
            status: *self.pick(ProspectStatus::ALL),
            last_activity: *self.pick(Activity::ALL),
        }
    }

    fn email(&mut self, first: &str, last: &str) -> String {
        let domain = self.pick(catalog::EMAIL_DOMAINS);
        let local = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
        if self.rng.random_bool(0.3) {
            let n: u8 = self.rng.random_range(1..=99);
            format!("{local}{n}@{domain}")
        } else {
            format!("{local}@{domain}")
        }
    }

    fn company(&mut self) -> CompanyCandidate {
        let head = self.pick(catalog::LAST_NAMES);
        let name = match self.rng.random_range(0..3) {
            0 => format!("{head} & {}", self.pick(catalog::LAST_NAMES)),
            1 => format!(
                "{head}, {} and {}",
                self.pick(catalog::LAST_NAMES),
                self.pick(catalog::LAST_NAMES)
            ),
            _ => format!(
                "{head} {} {}",
                self.pick(catalog::COMPANY_SECTORS),
                self.pick(catalog::COMPANY_SUFFIXES)
            ),
        };

        let address = format!(
            "{} {} {}, {} {:05}",
            self.rng.random_range(1..=9999u32),
            self.pick(catalog::STREET_NAMES),
            self.pick(catalog::STREET_TYPES),
            self.pick(catalog::CITIES),
            self.rng.random_range(10000..=99999u32),
        );

        let website = format!(
            "https://www.{}.{}/",
            head.to_lowercase(),
            self.pick(catalog::WEB_TLDS)
        );

        CompanyCandidate {
            name,
            industry: self.pick(catalog::INDUSTRIES).to_string(),
            address,
            website,
        }
    }

    /// One to three call-note sentences, never longer than [`MAX_NOTE_CHARS`].
    fn note(&mut self) -> String {
        let wanted = self.rng.random_range(1..=3);
        let mut note = String::new();
        for _ in 0..wanted {
            let sentence = self.pick(catalog::NOTE_SENTENCES);
            let extra = if note.is_empty() { 0 } else { 1 };
            if note.chars().count() + extra + sentence.chars().count() > MAX_NOTE_CHARS {
                break;
            }
            if !note.is_empty() {
                note.push(' ');
            }
            note.push_str(sentence);
        }
        note
    }

    fn days_ahead(&mut self, range: RangeInclusive<i64>) -> Date {
        self.today + TimeDelta::days(self.rng.random_range(range))
    }

    fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.rng.random_range(0..pool.len())]
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Round a monetary amount to 2 decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Drop companies whose name was already seen earlier in the batch.
///
/// Order of first occurrences is preserved.
pub fn dedup_companies(companies: Vec<CompanyCandidate>) -> Vec<CompanyCandidate> {
    let mut seen = HashSet::with_capacity(companies.len());
    companies
        .into_iter()
        .filter(|c| seen.insert(c.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> Date {
        Date::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn company(name: &str, industry: &str) -> CompanyCandidate {
        CompanyCandidate {
            name: name.to_string(),
            industry: industry.to_string(),
            address: "1 Oak Street, Salem 12345".to_string(),
            website: "https://www.example.com/".to_string(),
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let a = FixtureGenerator::seeded(42, today()).generate(25).unwrap();
        let b = FixtureGenerator::seeded(42, today()).generate(25).unwrap();
        assert_eq!(a.prospects, b.prospects);
        assert_eq!(a.companies, b.companies);
        assert_eq!(a.deals, b.deals);
        assert_eq!(a.tasks, b.tasks);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = FixtureGenerator::seeded(1, today()).generate(25).unwrap();
        let b = FixtureGenerator::seeded(2, today()).generate(25).unwrap();
        assert_ne!(a.prospects, b.prospects);
    }

    #[test]
    fn every_kind_has_count_entries() {
        let batch = FixtureGenerator::seeded(7, today()).generate(100).unwrap();
        assert_eq!(batch.len(), 100);
        assert_eq!(batch.companies.len(), 100);
        assert_eq!(batch.interactions.len(), 100);
        assert_eq!(batch.deals.len(), 100);
        assert_eq!(batch.tasks.len(), 100);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = FixtureGenerator::seeded(7, today()).generate(0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn dates_fall_inside_their_windows() {
        let today = today();
        let batch = FixtureGenerator::seeded(11, today).generate(200).unwrap();

        for p in &batch.prospects {
            assert!(p.last_contact <= today);
            assert!(p.last_contact >= today - TimeDelta::days(LAST_CONTACT_WINDOW_DAYS));
        }
        for d in &batch.deals {
            assert!(d.close_date >= today + TimeDelta::days(10));
            assert!(d.close_date <= today + TimeDelta::days(90));
        }
        for t in &batch.tasks {
            assert!(t.due_date > today);
            assert!(t.due_date <= today + TimeDelta::days(30));
        }
    }

    #[test]
    fn amounts_are_bounded_with_two_decimals() {
        let batch = FixtureGenerator::seeded(3, today()).generate(200).unwrap();
        for d in &batch.deals {
            assert!((MIN_DEAL_AMOUNT..=MAX_DEAL_AMOUNT).contains(&d.amount));
            let cents = d.amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{} has extra decimals", d.amount);
            assert_eq!(d.stage, DealStage::ProposalSent);
        }
    }

    #[test]
    fn interactions_mirror_their_prospect() {
        let batch = FixtureGenerator::seeded(5, today()).generate(50).unwrap();
        for (prospect, interaction) in batch.prospects.iter().zip(&batch.interactions) {
            assert_eq!(interaction.prospect_name, prospect.name);
            assert_eq!(interaction.date, prospect.last_contact);
            assert_eq!(interaction.kind, InteractionKind::Call);
            assert!(!interaction.content.is_empty());
            assert!(interaction.content.chars().count() <= MAX_NOTE_CHARS);
        }
    }

    #[test]
    fn titles_reference_the_paired_candidate() {
        let batch = FixtureGenerator::seeded(9, today()).generate(10).unwrap();
        for i in 0..batch.len() {
            assert_eq!(batch.deals[i].title, format!("Offer for {}", batch.companies[i].name));
            assert_eq!(batch.tasks[i].title, format!("Follow up {}", batch.prospects[i].name));
        }
    }

    #[test]
    fn addresses_are_single_line() {
        let batch = FixtureGenerator::seeded(13, today()).generate(50).unwrap();
        for c in &batch.companies {
            assert!(!c.address.contains('\n'));
            assert!(c.website.starts_with("https://www."));
        }
    }

    #[test]
    fn prospect_names_carry_a_middle_initial() {
        let batch = FixtureGenerator::seeded(17, today()).generate(50).unwrap();
        for p in &batch.prospects {
            let parts: Vec<&str> = p.name.split(' ').collect();
            assert_eq!(parts.len(), 3, "unexpected name {:?}", p.name);
            assert!(catalog::FIRST_NAMES.contains(&parts[0]));
            assert_eq!(parts[1].len(), 2);
            assert!(parts[1].starts_with(|c: char| c.is_ascii_uppercase()));
            assert!(parts[1].ends_with('.'));
            assert!(catalog::LAST_NAMES.contains(&parts[2]));
        }
    }

    /// A default-sized batch almost never repeats a name, so a first run
    /// normally stores exactly one prospect per candidate.
    #[test]
    fn default_batches_rarely_repeat_names() {
        let mut unique_prospects = 0;
        let mut unique_companies = 0;
        for seed in 0..100 {
            let batch = FixtureGenerator::seeded(seed, today())
                .generate(DEFAULT_PROSPECT_COUNT)
                .unwrap();
            let names: HashSet<&str> = batch.prospects.iter().map(|p| p.name.as_str()).collect();
            if names.len() == DEFAULT_PROSPECT_COUNT {
                unique_prospects += 1;
            }
            if dedup_companies(batch.companies).len() == DEFAULT_PROSPECT_COUNT {
                unique_companies += 1;
            }
        }
        assert!(unique_prospects >= 95, "only {unique_prospects}/100 seeds without repeats");
        assert!(unique_companies >= 85, "only {unique_companies}/100 seeds without repeats");
    }

    #[test]
    fn catalog_pools_have_no_duplicates() {
        for pool in [catalog::FIRST_NAMES, catalog::LAST_NAMES, catalog::COMPANY_SECTORS] {
            let unique: HashSet<&&str> = pool.iter().collect();
            assert_eq!(unique.len(), pool.len());
        }
    }

    #[test]
    fn pick_prospect_stays_within_ids() {
        let mut generator = FixtureGenerator::seeded(21, today());
        let ids = [4, 8, 15, 16, 23, 42];
        for _ in 0..100 {
            let id = generator.pick_prospect(&ids).unwrap();
            assert!(ids.contains(&id));
        }
        assert_eq!(generator.pick_prospect(&[]), None);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let deduped = dedup_companies(vec![
            company("Reed LLC", "Architect"),
            company("Shaw Labs", "Pharmacist"),
            company("Reed LLC", "Accountant"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "Reed LLC");
        assert_eq!(deduped[0].industry, "Architect");
        assert_eq!(deduped[1].name, "Shaw Labs");
    }

    #[test]
    fn round_cents_truncates_to_two_places() {
        assert_eq!(round_cents(1234.5678), 1234.57);
        assert_eq!(round_cents(500.0), 500.0);
    }
}
