use std::{
    cell::RefCell,
    env,
    io::{self, Write},
    rc::Rc,
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const TEST_SEED_ENV: &str = "TEST_SEED";

/// In-memory sink shared by every clone, so the output of several writers
/// lands in a single stream in the order it was written.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.bytes.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Seeded from `TEST_SEED` when set, otherwise from a random seed that is
/// printed so a failing run can be replayed.
pub fn seeded_rng() -> StdRng {
    let seed = env::var(TEST_SEED_ENV)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            let seed = random();
            println!("Using seed {seed} (set {TEST_SEED_ENV} to replay)");
            seed
        });
    StdRng::seed_from_u64(seed)
}
