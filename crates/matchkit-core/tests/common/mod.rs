use matchkit_core::composite::{bare_key, describe_nested_mismatches, MismatchCollector};
use matchkit_core::Description;

/// Member names `m0`, `m1`, ... for `count` members
#[allow(dead_code)]
pub fn member_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("m{}", i)).collect()
}

/// Render the mismatch block for `names`, treating `names[i]` as failing
/// when `failing[i]` is true. Each failure renders as `bad <name>`.
#[allow(dead_code)]
pub fn render_mask(names: &[String], failing: &[bool]) -> String {
    let mut collector = MismatchCollector::new();
    for (name, _) in names.iter().zip(failing).filter(|(_, f)| **f) {
        let text = format!("bad {}", name);
        collector.record(name.as_str(), move |d: &mut Description| {
            d.append_text(&text);
        });
    }
    let mut description = Description::new();
    describe_nested_mismatches(
        names.iter().map(String::as_str),
        &collector,
        &mut description,
        bare_key,
    );
    description.into_string()
}

/// Number of maximal runs of `false` in `failing`
#[allow(dead_code)]
pub fn matching_runs(failing: &[bool]) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for f in failing {
        if !*f && !in_run {
            runs += 1;
        }
        in_run = !*f;
    }
    runs
}
