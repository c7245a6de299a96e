use std::path::Path;

use console::Style;
use lightbox_core::consts::ALL_CATEGORY;
use lightbox_core::index::CategoryIndex;
use lightbox_core::io::{ProbeResult, ProbeStatus};
use lightbox_core::jobs::JobLocation;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    reserved: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            reserved: Style::new().green(),
            warn: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_categories(index: &CategoryIndex, source: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Categories"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Index"),
        s.path.apply_to(source.display())
    );
    if index.is_collapsed() && !index.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Grouping"),
            s.warn.apply_to("collapsed (mostly singleton categories)")
        );
    }
    println!();

    for (name, records) in index.iter() {
        let name_style = if name == ALL_CATEGORY { &s.reserved } else { &s.value };
        println!(
            "    {:<24}{:>6}",
            name_style.apply_to(name),
            s.label.apply_to(records.len())
        );
    }
    println!();
}

pub fn print_job_location(job: &JobLocation) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(&job.label));
    println!("  {:<14}{}", s.label.apply_to("Code"), s.value.apply_to(&job.code));
    println!("  {:<14}{}", s.label.apply_to("Index"), s.path.apply_to(&job.index));
    println!("  {:<14}{}", s.label.apply_to("Images"), s.path.apply_to(&job.images_dir));
    println!("  {:<14}{}", s.label.apply_to("Thumbnails"), s.path.apply_to(&job.thumbs_dir));
    if !job.registered {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Source"),
            s.warn.apply_to("not registered, convention paths")
        );
    }
    println!();
}

pub fn print_probe_summary(results: &[ProbeResult]) {
    let s = Styles::new();
    let ok = results.iter().filter(|r| r.is_ok()).count();

    println!();
    for result in results.iter().filter(|r| !r.is_ok()) {
        let reason = match &result.status {
            ProbeStatus::Missing => "missing".to_string(),
            ProbeStatus::Unreadable(e) => format!("unreadable: {e}"),
            ProbeStatus::Ok { .. } => continue,
        };
        println!(
            "    {:<24}{}  {}",
            s.value.apply_to(&result.record.name),
            s.path.apply_to(result.resolved.display()),
            s.warn.apply_to(reason)
        );
    }
    println!(
        "  {:<14}{} / {}",
        s.label.apply_to("Readable"),
        s.value.apply_to(ok),
        results.len()
    );
    println!();
}
