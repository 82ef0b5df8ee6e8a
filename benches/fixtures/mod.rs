// Synthetic review CSV generators for benchmarking
//
// Produces scraper-shaped CSV with a mix of short and long reviews, replies
// and app versions spread over a month of dates.

/// Workload size presets
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum WorkloadSize {
    Small,  // 10k reviews
    Medium, // 100k reviews
}

impl WorkloadSize {
    pub fn record_count(&self) -> usize {
        match self {
            WorkloadSize::Small => 10_000,
            WorkloadSize::Medium => 100_000,
        }
    }
}

const CONTENTS: &[&str] = &[
    "Great app",
    "Delivery was late and the food arrived cold, support did not respond for an hour",
    "  Instamart  is  quick ",
    "Worst experience ever",
    "Good offers but the app keeps crashing when I open the cart page on my phone",
];

/// Generate a CSV document with a header and `size` rows
pub fn generate_review_csv(size: WorkloadSize) -> String {
    let count = size.record_count();
    let mut csv = String::with_capacity(count * 160);
    csv.push_str(
        "reviewId,userName,content,score,thumbsUpCount,at,replyContent,repliedAt,reviewCreatedVersion\n",
    );

    for i in 0..count {
        let day = i % 28 + 1;
        let hour = i % 24;
        let (reply, replied_at) = if i % 4 == 0 {
            ("Sorry for the trouble", format!("2024-03-{:02} 23:59:00", day))
        } else {
            ("", String::new())
        };
        let version = if i % 3 == 0 { "" } else { "4.52.1" };

        csv.push_str(&format!(
            "{:08x}-review,user{},\"{}\",{},{},2024-03-{:02} {:02}:{:02}:00,{},{},{}\n",
            i,
            i,
            CONTENTS[i % CONTENTS.len()],
            i % 5 + 1,
            i % 97,
            day,
            hour,
            i % 60,
            reply,
            replied_at,
            version
        ));
    }

    csv
}
