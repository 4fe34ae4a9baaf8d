/// Runs a block and prints how long it took.
///
/// The plain form prints the label before running so long phases show what
/// they are working on; `at once |` prints label and duration together, for
/// blocks that draw their own progress bar.
#[macro_export]
macro_rules! time_it {
    ($label:literal => $stmt:stmt) => {{
        $crate::time_it!(concat!($label, "") => {$stmt})
    }};
    (at once | $label:literal => $stmt:stmt) => {{
        $crate::time_it!(at once | concat!($label, "") => {$stmt})
    }};
    ($label:expr => $stmt:stmt) => {{
        use std::io::Write;
        print!("{}", $label);
        let _ = std::io::stdout().flush();
        let start = std::time::Instant::now();
        let result = { $stmt };
        println!(" => {:?}", start.elapsed());
        result
    }};
    (at once | $label:expr => $stmt:stmt) => {{
        let start = std::time::Instant::now();
        let result = { $stmt };
        println!("{} => {:?}", $label, start.elapsed());
        result
    }};
}

#[macro_export]
macro_rules! debug {
    ($($val:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let _ = dbg!($($val),+);
        }
    };
}
