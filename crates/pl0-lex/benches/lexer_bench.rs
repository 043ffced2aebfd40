//! Lexer throughput benchmarks.
//!
//! Run with: `cargo bench --package pl0-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pl0_lex::Lexer;
use pl0_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, &handler);
    lexer.count()
}

const SMALL: &str = "const a = 1; var x, y; begin x := a + 1; y := x * 2 end.";

const LARGE: &str = r#"
const max = 100;
var i, sum, result;

procedure isPrime(n);
    var d;
    begin
        d := 2;
        result := 1;
        while d * d <= n do
        begin
            if n - (n / d) * d = 0 then
                result := 0;
            d := d + 1
        end
    end;

begin
    sum := 0;
    for (i := 2; i <= max; i := i + 1)
        begin
            call isPrime(i);
            if odd result then
                sum := sum + i
        end;
    ! sum
end.
"#;

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(SMALL.len() as u64));
    group.bench_function("small_program", |b| b.iter(|| lexer_token_count(black_box(SMALL))));

    group.throughput(Throughput::Bytes(LARGE.len() as u64));
    group.bench_function("prime_sieve_program", |b| b.iter(|| lexer_token_count(black_box(LARGE))));

    group.finish();
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
