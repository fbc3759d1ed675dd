/// A book picked from the `id,name` entries of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookChoice(i32);

impl BookChoice{
    /// Takes the text left of the first comma as the book id.
    pub fn parse(entry: &str) -> Result<BookChoice, String>{
        let id = match entry.split_once(','){
            Some((id, _)) => id,
            None => entry
        }
        .trim();

        if id.is_empty(){
            return Err("A book must be chosen".to_string())
        }

        id.parse::<i32>()
            .map(Self)
            .map_err(|_| format!("{:?} is not a valid book entry", entry))
    }

    pub fn bookid(&self) -> i32 {
        self.0
    }
}
