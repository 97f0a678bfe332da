/// Parsed `meta.txt`: the declared player count and every list line
/// that follows it, in file order. Blank lines are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub n: usize,
    pub lists: Vec<Vec<String>>,
}

impl TryFrom<&str> for Meta {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        let n = lines
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty meta file"))?
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("player count: {}", e))?;
        let lists = lines.map(split).collect::<anyhow::Result<Vec<Vec<String>>>>()?;
        Ok(Self { n, lists })
    }
}

/// comma separated fields with all whitespace removed
pub fn split(line: &str) -> anyhow::Result<Vec<String>> {
    let fields = line
        .split(',')
        .map(|field| field.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .collect::<Vec<String>>();
    match fields.iter().any(String::is_empty) {
        true => Err(anyhow::anyhow!("empty field in {:?}", line)),
        false => Ok(fields),
    }
}
