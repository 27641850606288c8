//! Python source fixtures

/// `main` spawns `worker`, which bumps its parameter under one lock
pub fn fixture_worker_under_lock() -> String {
    r#"import threading

lock = threading.Lock()

def worker(shared):
    lock.acquire()
    shared += 1
    lock.release()

def main():
    counter = 0
    t = Thread(target=worker, args=(counter,))
    t.start()
    t.join()
"#
    .to_string()
}

/// One function writing the same parameter under two different locks
pub fn fixture_two_mutexes() -> String {
    r#"def worker(data):
    a.acquire()
    data = 1
    a.release()
    b.acquire()
    data = 2
    b.release()

def main():
    t = Thread(target=worker)
"#
    .to_string()
}

/// `spawner` starts one thread per target
pub fn fixture_spawner(spawner: &str, targets: &[&str]) -> String {
    let spawns: String = targets
        .iter()
        .enumerate()
        .map(|(i, target)| format!("    t{i} = Thread(target={target})\n"))
        .collect();
    format!("def {spawner}():\n{spawns}")
}

/// `name` declares `vars` global and assigns each one
pub fn fixture_global_writer(name: &str, vars: &[&str]) -> String {
    let writes: String = vars.iter().map(|v| format!("    {v} = 1\n")).collect();
    format!("def {name}():\n    global {}\n{writes}", vars.join(", "))
}

/// Concatenate source units with blank lines between them
pub fn join_units(units: &[String]) -> String {
    units.join("\n")
}
