//! # Helper Routine Templates
//!
//! One template per helper key. Each takes the name the session issued for
//! the routine and the indent unit, and returns the complete JavaScript
//! function declaration.

/// Helper keys, used as the name basis when the routine is registered.
pub const IS_PRIME: &str = "math_isPrime";
pub const RANDOM_INT: &str = "math_random_int";
pub const SUM: &str = "math_sum";
pub const MIN: &str = "math_min";
pub const MAX: &str = "math_max";
pub const MEAN: &str = "math_mean";
pub const MEDIAN: &str = "math_median";
pub const MODES: &str = "math_modes";
pub const STANDARD_DEVIATION: &str = "math_standard_deviation";
pub const RANDOM_ITEM: &str = "math_random_item";

/// Line-oriented builder that tracks block depth.
struct SourceBuilder<'a> {
    indent: &'a str,
    depth: usize,
    lines: Vec<String>,
}

impl<'a> SourceBuilder<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            indent,
            depth: 0,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("{}{}", self.indent.repeat(self.depth), text));
        self
    }

    /// Emit a line that opens a block.
    fn open(&mut self, text: &str) -> &mut Self {
        self.line(text);
        self.depth += 1;
        self
    }

    /// Emit a line that closes a block.
    fn close(&mut self, text: &str) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line(text)
    }

    fn build(&self) -> String {
        self.lines.join("\n")
    }
}

/// `var numbers = <list filtered to numbers>;`
fn filter_numbers(src: &mut SourceBuilder<'_>) {
    src.open("var numbers = list.filter(function(x) {")
        .line("return typeof x === 'number';")
        .close("});");
}

/// `return null;` when nothing numeric is left.
fn return_null_if_empty(src: &mut SourceBuilder<'_>) {
    src.open("if (!numbers.length) {")
        .line("return null;")
        .close("}");
}

fn sum_of(src: &mut SourceBuilder<'_>, prefix: &str, suffix: &str) {
    src.open(&format!("{}numbers.reduce(function(x, y) {{", prefix))
        .line("return x + y;")
        .close(&format!("}}, 0){};", suffix));
}

/// Naive primality test: reject non-whole numbers, 1 and below, multiples
/// of 2 and 3, then trial-divide by 6k ± 1 up to the square root.
pub fn is_prime(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(n) {{", name))
        .open("if (n == 2 || n == 3) {")
        .line("return true;")
        .close("}")
        .open("if (isNaN(n) || n <= 1 || n % 1 != 0 || n % 2 == 0 || n % 3 == 0) {")
        .line("return false;")
        .close("}")
        .open("for (var x = 6; x <= Math.sqrt(n) + 1; x += 6) {")
        .open("if (n % (x - 1) == 0 || n % (x + 1) == 0) {")
        .line("return false;")
        .close("}")
        .close("}")
        .line("return true;")
        .close("}");
    src.build()
}

/// Random integer in `[a, b]`, swapping the bounds when given backwards.
pub fn random_int(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(a, b) {{", name))
        .open("if (a > b) {")
        .line("var c = a;")
        .line("a = b;")
        .line("b = c;")
        .close("}")
        .line("return a + Math.floor(Math.random() * (b - a + 1));")
        .close("}");
    src.build()
}

pub fn sum(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name))
        .open("return list.reduce(function(x, y) {")
        .line("return x + y;")
        .close("}, 0);")
        .close("}");
    src.build()
}

pub fn min(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name))
        .line("return Math.min.apply(null, list);")
        .close("}");
    src.build()
}

pub fn max(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name))
        .line("return Math.max.apply(null, list);")
        .close("}");
    src.build()
}

pub fn mean(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name));
    filter_numbers(&mut src);
    return_null_if_empty(&mut src);
    sum_of(&mut src, "return ", " / numbers.length");
    src.close("}");
    src.build()
}

/// Middle element of the sorted numbers, or the average of the two middle
/// elements for an even count.
pub fn median(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name));
    filter_numbers(&mut src);
    return_null_if_empty(&mut src);
    src.open("numbers.sort(function(a, b) {")
        .line("return a - b;")
        .close("});")
        .line("var middle = Math.floor(numbers.length / 2);")
        .open("if (numbers.length % 2 == 0) {")
        .line("return (numbers[middle - 1] + numbers[middle]) / 2;")
        .close("}")
        .line("return numbers[middle];")
        .close("}");
    src.build()
}

/// Every value that occurs with the highest frequency. Values are grouped
/// with strict equality.
pub fn modes(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name));
    filter_numbers(&mut src);
    src.line("var counts = [];")
        .line("var maxCount = 0;")
        .open("for (var i = 0; i < numbers.length; i++) {")
        .line("var entry = null;")
        .open("for (var j = 0; j < counts.length; j++) {")
        .open("if (counts[j][0] === numbers[i]) {")
        .line("entry = counts[j];")
        .line("break;")
        .close("}")
        .close("}")
        .open("if (entry === null) {")
        .line("entry = [numbers[i], 0];")
        .line("counts.push(entry);")
        .close("}")
        .line("entry[1]++;")
        .line("maxCount = Math.max(maxCount, entry[1]);")
        .close("}")
        .line("var modes = [];")
        .open("for (var k = 0; k < counts.length; k++) {")
        .open("if (counts[k][1] == maxCount) {")
        .line("modes.push(counts[k][0]);")
        .close("}")
        .close("}")
        .line("return modes;")
        .close("}");
    src.build()
}

/// Population standard deviation.
pub fn standard_deviation(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name));
    filter_numbers(&mut src);
    return_null_if_empty(&mut src);
    src.line("var n = numbers.length;");
    sum_of(&mut src, "var mean = ", " / n");
    src.line("var variance = 0;")
        .open("for (var j = 0; j < n; j++) {")
        .line("variance += Math.pow(numbers[j] - mean, 2);")
        .close("}")
        .line("return Math.sqrt(variance / n);")
        .close("}");
    src.build()
}

pub fn random_item(name: &str, indent: &str) -> String {
    let mut src = SourceBuilder::new(indent);
    src.open(&format!("function {}(list) {{", name))
        .line("var x = Math.floor(Math.random() * list.length);")
        .line("return list[x];")
        .close("}");
    src.build()
}
