use ypoly::*;

fn poly<const N: usize>(terms: [(i64, Deg); N]) -> Poly { 
    Poly::from_iter(terms)
}

#[test]
fn quadratic() { 
    let p = parse("3x^2+2x+5").unwrap();
    assert_eq!(p, poly([(3, 2), (2, 1), (5, 0)]));
    assert_eq!(format(&p), "3x^2+2x+5");

    let dp = differentiate(&p).unwrap();
    assert_eq!(dp, poly([(6, 1), (2, 0)]));
    assert_eq!(format(&dp), "6x+2");
}

#[test]
fn negative_leading() { 
    let p = parse("-x^2+2x-5").unwrap();
    assert_eq!(p, poly([(-1, 2), (2, 1), (-5, 0)]));
    assert_eq!(format(&p), "-x^2+2x-5");
}

#[test]
fn boundaries() { 
    assert_eq!(parse(""), Ok(Poly::zero()));
    assert_eq!(format(&Poly::zero()), "0");
}

#[test]
fn round_trips() { 
    let inputs = [
        "x", "-x", "7", "-7", "x^2", "-x^3+x", "10x^10-9x^9+8", 
        "x+x", "1-x", "x^0", "0", "123x^45-67x^8-9",
    ];
    for s in inputs { 
        let p = parse(s).unwrap();
        assert_eq!(parse(&format(&p)), Ok(p), "input: {s}");
    }
}

#[test]
fn zero_terms_dropped_by_format() { 
    let p = parse("x+0").unwrap();
    assert_eq!(p, poly([(1, 1), (0, 0)]));
    assert_eq!(format(&p), "x");
    assert_eq!(parse(&format(&p)), Ok(poly([(1, 1)])));

    let p = parse("0x+1").unwrap();
    assert_eq!(p, poly([(0, 1), (1, 0)]));
    assert_eq!(format(&p), "1");
    assert_eq!(parse(&format(&p)), Ok(poly([(1, 0)])));
    assert_eq!(parse(&format(&p)), p.simplify());
}

#[test]
fn repeated_differentiation() { 
    for s in ["x^5-3x^2+1", "7", "x", "-4x^3+2x^2"] { 
        let p = parse(s).unwrap();
        let k = p.degree().unwrap_or(0) as usize;
        assert_eq!(nth_derivative(&p, k + 1), Ok(Poly::zero()), "input: {s}");
    }
}

#[test]
fn derivative_evaluation() { 
    let p = parse("2x^6-x^5+3x^2-x+11").unwrap();
    let dp = differentiate(&p).unwrap();

    for i in -20..=20 { 
        let x = i as f64 * 0.37;
        assert_eq!(evaluate(&dp, x), evaluate_derivative_at(&p, x));
    }
}

#[test]
fn newton_sqrt2() { 
    let p = parse("x^2-2").unwrap();
    let x = find_root(&p, 2.0, 1e-6, 20).unwrap();
    assert!((x - 1.41421356).abs() < 1e-6);
}

#[test]
fn newton_constant() { 
    let p = parse("5").unwrap();
    let res = find_root(&p, 2.0, 1e-6, 20);
    assert!(matches!(res, Err(Error::DivisionByZero { iter: 1, .. })));
}
