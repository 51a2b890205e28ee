/*!
# Introduction to Slate

Slate is a language for a first programming course. A Slate program is a
plain text file, one statement per line, and the interpreter walks the
lines one at a time. Start the interpreter, give it your file, and say
whether you want the source echoed back with line numbers.

<pre><code>&nbsp;$ slate
&nbsp;Please enter program name: hello.slt
&nbsp;List program (y for yes)? n
&nbsp;Hello World
</code></pre>

The whole of `hello.slt` is one line:

```text
PRINTLN "Hello World"
```

Values are signed integers. Variables live on one shared stack: `DECLARE`
makes a slot, `:=` fills it, and when a function or procedure returns its
slots are gone. Recursion works exactly the way the stack makes it work,
and the stack holds 100 slots, so a runaway recursion stops with an error
instead of taking your machine with it.

```text
DECLARE total, n
n := 6
total := n * (n + 1) / 2
PRINTLN "the sum of 1..6 is ", total
ENDPROGRAM
```

Keywords are case insensitive. Lines starting with `;` are comments, and
blank lines are fine anywhere. Stop a looping program with CTRL-C.

*/
