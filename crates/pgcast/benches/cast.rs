//! Cast benchmarks using divan
//!
//! Benchmarks for interpreted evaluation and code emission of the
//! PostgreSQL casts.

use pgcast::types::{DataType, Value, ZoneId};
use pgcast::{
    BoundReference, Expression, FragmentContext, PostgresCastToBoolean, PostgresCastToTimestamp,
};

fn main() {
    divan::main();
}

fn string_column() -> pgcast::ExprRef {
    BoundReference::new(0, DataType::String, true).into_ref()
}

mod classify {
    #[divan::bench(args = ["t", "  TrUe  ", "maybe"])]
    fn classify(raw: &str) -> pgcast::eval::TruthValue {
        pgcast::eval::classify(divan::black_box(raw))
    }
}

mod interpreted {
    use super::*;

    #[divan::bench]
    fn boolean_from_string(bencher: divan::Bencher) {
        let cast = PostgresCastToBoolean::new(string_column());
        let row = vec![Value::string(" yes ")];

        bencher.bench_local(|| cast.eval(divan::black_box(&row)));
    }

    #[divan::bench]
    fn boolean_rejects_string(bencher: divan::Bencher) {
        let cast = PostgresCastToBoolean::new(string_column());
        let row = vec![Value::string("maybe")];

        bencher.bench_local(|| cast.eval(divan::black_box(&row)));
    }

    #[divan::bench]
    fn timestamp_from_string(bencher: divan::Bencher) {
        let cast = PostgresCastToTimestamp::with_zone_id(string_column(), Some(ZoneId::utc()));
        let row = vec![Value::string("2020-01-01 12:34:56.789")];

        bencher.bench_local(|| cast.eval(divan::black_box(&row)));
    }
}

mod emission {
    use super::*;

    #[divan::bench]
    fn boolean_unit(bencher: divan::Bencher) {
        let cast = PostgresCastToBoolean::new(string_column());

        bencher.bench_local(|| {
            let mut ctx = FragmentContext::new();
            let code = cast.gen_code(&mut ctx)?;
            Ok::<_, pgcast::EvalError>(ctx.render_function("eval_cast", &code, &DataType::Boolean))
        });
    }

    #[divan::bench]
    fn timestamp_unit(bencher: divan::Bencher) {
        let cast = PostgresCastToTimestamp::with_zone_id(string_column(), Some(ZoneId::utc()));

        bencher.bench_local(|| {
            let mut ctx = FragmentContext::new();
            let code = cast.gen_code(&mut ctx)?;
            Ok::<_, pgcast::EvalError>(ctx.render_function("eval_cast", &code, &DataType::Timestamp))
        });
    }
}
