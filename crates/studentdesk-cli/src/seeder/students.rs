//! Student seeding.

use chrono::Duration;
use fake::Fake;
use fake::faker::name::en::*;
use rand::Rng;
use rayon::prelude::*;
use std::time::Instant;
use studentdesk_client::StudentStore;
use studentdesk_core::dates::format_display_date;
use studentdesk_models::{EnrollmentNumber, Student, StudentId};

use super::models::StudentSeedConfig;

const EMAIL_MAX_LEN: usize = 50;
const EMAIL_DOMAIN: &str = "example.com";

/// Highest numeric part of `EN…` enrollment numbers already in use.
fn highest_enrollment(existing: &[Student]) -> u32 {
    existing
        .iter()
        .filter(|s| EnrollmentNumber::is_valid_format(&s.enroll_num))
        .filter_map(|s| s.enroll_num.strip_prefix(EnrollmentNumber::PREFIX))
        .filter_map(|digits| digits.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Generates students whose emails and enrollment numbers do not collide
/// with each other or with `existing`.
///
/// Enrollment numbers continue after the highest one in use; emails carry
/// a sequence suffix.
pub fn generate_students(config: &StudentSeedConfig, existing: &[Student]) -> Vec<Student> {
    let first_number = highest_enrollment(existing) + 1;
    let email_offset = existing.len();
    let span = config.span_days().max(1);

    (0..config.count)
        .into_par_iter()
        .map(|idx| {
            let mut rng = rand::thread_rng();
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email = seed_email(&first_name, &last_name, email_offset + idx);
            let admitted = config.admitted_from + Duration::days(rng.gen_range(0..span));

            Student {
                id: StudentId::generate(),
                name: format!("{} {}", first_name, last_name),
                email,
                phone_num: format!("{}", rng.gen_range(2_000_000_000u64..10_000_000_000)),
                enroll_num: format!(
                    "{}{:07}",
                    EnrollmentNumber::PREFIX,
                    first_number as usize + idx
                ),
                date_admission: format_display_date(admitted),
                avatar: None,
            }
        })
        .collect()
}

/// `first.last+seq@example.com`, with the name part cut so the address
/// fits in the email length limit. The sequence suffix is always kept.
fn seed_email(first_name: &str, last_name: &str, seq: usize) -> String {
    let suffix = format!("+{}@{}", seq, EMAIL_DOMAIN);
    let budget = EMAIL_MAX_LEN.saturating_sub(suffix.len());

    let mut local = format!("{}.{}", ascii_slug(first_name), ascii_slug(last_name));
    local.truncate(budget);
    let local = local.trim_matches('.');
    let local = if local.is_empty() { "student" } else { local };

    format!("{}{}", local, suffix)
}

fn ascii_slug(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Generates and stores `config.count` students.
pub async fn seed_students(
    store: &dyn StudentStore,
    config: &StudentSeedConfig,
) -> Result<Vec<Student>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", config.count);

    let existing = store.get_all().await?;
    if highest_enrollment(&existing) as usize + config.count > 9_999_999 {
        return Err("Not enough enrollment numbers left for this many students".into());
    }

    let students = generate_students(config, &existing);
    for student in &students {
        store.create(student).await?;
    }

    println!(
        "   ✓ Created {} students in {:.2?}",
        students.len(),
        start_time.elapsed()
    );
    Ok(students)
}

/// Deletes every student record. Returns how many were removed.
pub async fn clear_students(store: &dyn StudentStore) -> Result<usize, Box<dyn std::error::Error>> {
    let students = store.get_all().await?;
    for student in &students {
        store.delete(&student.id).await?;
    }
    Ok(students.len())
}
