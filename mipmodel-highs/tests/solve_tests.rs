use mipmodel::*;
use mipmodel_highs::HighsSolver;

const TOL : f64 = 1e-6;

fn assert_close(a : f64, b : f64) {
    assert!((a - b).abs() < TOL, "{} != {}", a, b);
}

#[test]
fn small_lp() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions{ upper_bound : 20.0, ..Default::default() });
    let y = m.add_var(VarOptions{ upper_bound : 12.0, ..Default::default() });
    m.set_maximization();
    m.add_obj(2.0 * x + 3.0 * y);
    m.add_constraint((x + y).less_than(30.0));

    let mut s : HighsSolver = m.build().unwrap();
    assert_eq!(s.optimize(), ReturnCode::Success);
    let sol = s.get_solution();
    assert_eq!(sol.len(), 2);
    assert_close(sol[0], 18.0);
    assert_close(sol[1], 12.0);
    assert_close(s.get_objective_value(), 72.0);
    assert_close(m.evaluate(x + y, &sol).unwrap(), 30.0);

    // solving again reports the same result
    assert_eq!(s.optimize(), ReturnCode::Success);
}

#[test]
fn integer_variables() {
    // max x + y  s.t.  2x + 2y <= 7, x,y integer
    let mut m = Model::new();
    let x = m.add_var(VarOptions::new().integer());
    let y = m.add_var(VarOptions::new().integer());
    m.set_maximization();
    m.add_obj(x + y);
    m.add_constraint((2.0 * x + 2.0 * y).less_than(7.0));

    let mut s : HighsSolver = m.build().unwrap();
    assert_eq!(s.optimize(), ReturnCode::Success);
    assert_close(s.get_objective_value(), 3.0);
    for v in s.get_solution() {
        assert_close(v, v.round());
    }
}

#[test]
fn binary_variables() {
    // knapsack: values 5,4,3, weights 4,3,2, capacity 5
    let mut m = Model::new();
    let x = m.add_vars(3, |i : usize| i);
    let value = [5.0,4.0,3.0];
    let weight = [4.0,3.0,2.0];
    for i in 0..3 {
        m.set_var_type(x(i), VarCategory::Binary);
        m.set_upper_bound(x(i), 10.0);
    }
    m.set_maximization();
    m.add_obj(xsum_with(0..3, &x, |i| value[i]));
    m.add_constraint(xsum_with(0..3, &x, |i| weight[i]).less_than(5.0));

    let mut s : HighsSolver = m.build().unwrap();
    assert_eq!(s.optimize(), ReturnCode::Success);
    assert_close(s.get_objective_value(), 7.0);
    let sol = s.get_solution();
    assert_close(sol[0], 0.0);
    assert_close(sol[1], 1.0);
    assert_close(sol[2], 1.0);
}

#[test]
fn duplicate_entries_are_summed() {
    // x + x <= 4 is 2x <= 4
    let mut m = Model::new();
    let x = m.add_var(VarOptions::default());
    let y = m.add_var(VarOptions::new().upper_bound(1.0));
    m.set_maximization();
    m.add_obj(x + y);
    let c = m.add_constraint((x + y + x - y).less_than(4.0));
    assert_eq!(m.constraint(c).len(), 4);

    let mut s : HighsSolver = m.build().unwrap();
    assert_eq!(s.optimize(), ReturnCode::Success);
    assert_close(s.get_objective_value(), 3.0);
    assert_close(s.get_solution()[0], 2.0);
}

#[test]
fn objective_constant_is_reported() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions::new().bounds(1.0,5.0));
    m.add_obj(3.0 * x + 10.0);
    m.add_obj(x + (-4.0));

    let mut s : HighsSolver = m.build().unwrap();
    assert_eq!(s.optimize(), ReturnCode::Success);
    assert_close(s.get_solution()[0], 1.0);
    assert_close(s.get_objective_value(), 10.0);
}

#[test]
fn equality_and_ranges() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions::new().free());
    let y = m.add_var(VarOptions::new().free());
    m.add_obj(x - y);
    m.add_constraint((x + y).equal_to(4.0));
    m.add_constraint((x + 1.0).in_range(2.0,4.0));

    let mut s : HighsSolver = m.build().unwrap();
    assert_eq!(s.optimize(), ReturnCode::Success);
    let sol = s.get_solution();
    assert_close(sol[0], 1.0);
    assert_close(sol[1], 3.0);
    assert_close(s.get_objective_value(), -2.0);
}

#[test]
fn infeasible() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions::default());
    m.add_obj(x);
    m.add_constraint(x.greater_than(3.0));
    m.add_constraint(x.less_than(1.0));

    let mut s : HighsSolver = m.build().unwrap();
    let rc = s.optimize();
    assert!(matches!(rc, ReturnCode::Infeasible | ReturnCode::InfeasibleOrUnbounded), "{:?}", rc);
    assert!(!rc.is_success());
}

#[test]
fn unbounded() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions::default());
    let y = m.add_var(VarOptions::default());
    m.set_maximization();
    m.add_obj(x + y);
    m.add_constraint((x - y).less_than(1.0));

    let mut s : HighsSolver = m.build().unwrap();
    let rc = s.optimize();
    assert!(matches!(rc, ReturnCode::Unbounded | ReturnCode::InfeasibleOrUnbounded), "{:?}", rc);
}

#[test]
fn parameters_are_applied() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions::new().upper_bound(2.0));
    m.set_maximization();
    m.add_obj(x);

    let mut s : HighsSolver = m.build().unwrap();
    s.set_parameter("time_limit", 60.0);
    s.set_parameter("presolve", "off");
    s.set_parameter("random_seed", 3);
    s.set_parameter("mip_detect_symmetry", true);
    assert_eq!(s.optimize(), ReturnCode::Success);
    assert_close(s.get_objective_value(), 2.0);
}

#[test]
fn rejected_parameters_do_not_reach_the_solve() {
    let mut m = Model::new();
    let x = m.add_var(VarOptions::new().upper_bound(2.0));
    m.set_maximization();
    m.add_obj(x);

    let mut s : HighsSolver = m.build().unwrap();
    let err = s.try_set_parameter("no_such_option", 1).unwrap_err();
    assert_eq!(err.code(), "HIGHS_INVALID_OPTION_NAME");
    assert!(s.try_set_parameter("presolve", true).is_err());
    assert!(s.try_set_parameter("time_limit", -1.0).is_err());
    s.set_parameter("time_limit", 30);

    assert_eq!(s.optimize(), ReturnCode::Success);
    assert_close(s.get_objective_value(), 2.0);
}

#[test]
#[should_panic]
fn unknown_parameter_panics_in_plain_form() {
    let mut s : HighsSolver = Model::new().build().unwrap();
    s.set_parameter("no_such_option", 1);
}
