use std::collections::HashMap;

#[derive(Default)]
pub struct Interner {
    indices: HashMap<String, u32>,
    strings: Vec<String>,
}

impl Interner {
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.indices.get(s) {
            return idx;
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.to_owned());
        self.indices.insert(s.to_owned(), idx);
        idx
    }

    pub fn lookup(&self, idx: u32) -> &str {
        &self.strings[idx as usize]
    }
}
