//! Line-oriented profile form wizard.
//!
//! Walks the same fields as the profile form, one prompt per line, and
//! produces the entry list the aggregator consumes. Multi-value fields take
//! comma-separated tags; each selected tag becomes its own entry, mirroring
//! how checkbox groups submit. The job field is additionally recorded as the
//! control's own selection.

use futures::{Stream, StreamExt};

use crate::profile::ProfileForm;

struct TagField {
    name: &'static str,
    label: &'static str,
    options: &'static str,
}

const JOB: TagField = TagField {
    name: "job",
    label: "Job (multi-select, comma-separated)",
    options: "student, employee, self_employed, freelancer, unemployed, other",
};

const GOALS: TagField = TagField {
    name: "financial_goals",
    label: "Financial goals (multi-select, comma-separated)",
    options: "growth, retirement, housing, car, debt",
};

const EXPERIENCE: TagField = TagField {
    name: "investment_experience",
    label: "Investment experience (multi-select, comma-separated)",
    options: "deposit, stock, bond, fund, crypto, none",
};

/// Run the wizard. Returns `None` if input ends before the form is complete.
pub async fn run<S>(lines: &mut S) -> Option<ProfileForm>
where
    S: Stream<Item = String> + Unpin,
{
    let mut form = ProfileForm::new();

    eprintln!("── Profile form (blank line skips optional fields) ──");

    ask_required(lines, &mut form, "age", "Age").await?;

    let jobs = ask_tags(lines, &JOB).await?;
    for job in &jobs {
        form.push_entry("job", job.clone());
    }
    // The multi-select control is also read directly; its selection wins.
    form.set_job_selection(jobs);

    ask_required(lines, &mut form, "income", "Annual pre-tax income").await?;
    ask_choice(
        lines,
        &mut form,
        "region",
        "Region",
        "seoul, gyeonggi, incheon, busan, daegu, gwangju, daejeon, ulsan, sejong, gangwon, \
         chungbuk, chungnam, jeonbuk, jeonnam, gyeongbuk, gyeongnam, jeju",
    )
    .await?;
    ask_choice(lines, &mut form, "marital", "Marital status", "single, married").await?;
    ask_choice(lines, &mut form, "children", "Children", "yes, no").await?;
    ask_choice(
        lines,
        &mut form,
        "main_bank",
        "Main bank",
        "kb, shinhan, hana, woori, nh, kakao, toss, kbank, other",
    )
    .await?;
    ask_required(lines, &mut form, "credit_score", "Credit score (0-1000)").await?;
    ask_choice(
        lines,
        &mut form,
        "financial_knowledge",
        "Financial knowledge level",
        "high, mid, low",
    )
    .await?;

    for tag in ask_tags(lines, &GOALS).await? {
        form.push_entry("financial_goals", tag);
    }
    for tag in ask_tags(lines, &EXPERIENCE).await? {
        form.push_entry("investment_experience", tag);
    }

    ask_choice(lines, &mut form, "real_estate_owned", "Real estate owned", "yes, no").await?;
    ask_optional(lines, &mut form, "real_estate_assets", "Real estate assets").await?;
    ask_optional(lines, &mut form, "car_assets", "Car assets").await?;
    ask_optional(lines, &mut form, "other_assets", "Other assets").await?;

    Some(form)
}

async fn next_trimmed<S>(lines: &mut S) -> Option<String>
where
    S: Stream<Item = String> + Unpin,
{
    lines.next().await.map(|line| line.trim().to_string())
}

/// Prompt until a non-empty value arrives.
async fn ask_required<S>(
    lines: &mut S,
    form: &mut ProfileForm,
    name: &'static str,
    label: &str,
) -> Option<()>
where
    S: Stream<Item = String> + Unpin,
{
    loop {
        eprint!("{label}: ");
        let value = next_trimmed(lines).await?;
        if value.is_empty() {
            eprintln!("   (required)");
            continue;
        }
        form.push_entry(name, value);
        return Some(());
    }
}

async fn ask_choice<S>(
    lines: &mut S,
    form: &mut ProfileForm,
    name: &'static str,
    label: &str,
    options: &str,
) -> Option<()>
where
    S: Stream<Item = String> + Unpin,
{
    eprintln!("{label} [{options}]");
    ask_required(lines, form, name, label).await
}

/// Optional numeric field; a blank line skips it.
async fn ask_optional<S>(
    lines: &mut S,
    form: &mut ProfileForm,
    name: &'static str,
    label: &str,
) -> Option<()>
where
    S: Stream<Item = String> + Unpin,
{
    eprint!("{label} (optional): ");
    let value = next_trimmed(lines).await?;
    if !value.is_empty() {
        form.push_entry(name, value);
    }
    Some(())
}

async fn ask_tags<S>(lines: &mut S, field: &TagField) -> Option<Vec<String>>
where
    S: Stream<Item = String> + Unpin,
{
    eprintln!("{} [{}]", field.label, field.options);
    eprint!("{}: ", field.name);
    let value = next_trimmed(lines).await?;
    Some(
        value
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
