use chrono::{Duration, Local};

/// Minimal deterministic PRNG (xoshiro256**), enough for demo data.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Uniform integer in [lo, hi).
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo) as u64) as i64
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "FMEA_PDCA.csv".to_string());

    let departments = ["MECH", "PAINT", "WELD", "ASSY"];
    let makers = [
        ("Honda", ["Civic", "City", "BR-V"]),
        ("Toyota", ["Vios", "Innova", "Fortuner"]),
        ("Nissan", ["Almera", "Navara", "Terra"]),
    ];
    let lines = ["3158", "3159", "2201", "2202", "1105"];
    let findings = [
        "Loose bolt on bracket",
        "Paint run on door panel",
        "Missing clip, harness routing",
        "Weld spatter near seam",
        "Torque below spec",
        "Scratch on fender",
    ];
    let actions = [
        "Re-torque and verify",
        "Rework and buff",
        "Replace clip, retrain operator",
        "Clean and inspect seam",
        "Recalibrate torque gun",
        "Polish and recheck",
    ];
    let people = ["Reyes", "Cruz", "Santos", "Garcia", "Dela Cruz"];

    let mut rng = SimpleRng::new(20240530);
    let today = Local::now().date_naive();

    let mut writer = csv::Writer::from_path(&out)?;
    writer.write_record([
        "Car Maker",
        "Car Model",
        "Line",
        "Findings",
        "Items to Check/Action",
        "Department",
        "Person in Charge",
        "Status",
        "Target Date",
    ])?;

    for _ in 0..120 {
        let (maker, models) = rng.pick(&makers);
        let status = if rng.next_u64() % 5 < 2 { "OPEN" } else { "CLOSE" };
        // A slice of rows gets no target date at all, they must still show
        // up as delayed when open.
        let target_date = if rng.next_u64() % 10 == 0 {
            String::new()
        } else {
            let offset = rng.range(-45, 45);
            (today + Duration::days(offset))
                .format("%Y-%m-%d")
                .to_string()
        };

        writer.write_record([
            *maker,
            *rng.pick(models),
            *rng.pick(&lines),
            *rng.pick(&findings),
            *rng.pick(&actions),
            *rng.pick(&departments),
            *rng.pick(&people),
            status,
            target_date.as_str(),
        ])?;
    }

    writer.flush()?;
    println!("Wrote sample findings to {out}");
    Ok(())
}
